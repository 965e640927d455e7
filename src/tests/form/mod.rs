mod controller_tests;
mod editor_tests;
