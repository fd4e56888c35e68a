pub mod teardown;
