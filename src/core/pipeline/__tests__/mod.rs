mod quantize_test;
