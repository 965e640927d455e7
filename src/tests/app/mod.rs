mod parent_tests;
