pub mod statistics_testkit;
