mod glyph_test;
