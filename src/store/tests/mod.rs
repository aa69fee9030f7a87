mod page_store_tests;
