//! File gateway test harness

mod gateway_tests;
