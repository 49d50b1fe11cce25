mod pipeline_tests;
mod resolver_tests;
mod router_tests;
mod utils;
