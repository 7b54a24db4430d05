mod api_server_test;
