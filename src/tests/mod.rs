// Cross-module tests for the color pipeline

#[cfg(test)]
mod display_tests;

#[cfg(test)]
mod property_tests;
