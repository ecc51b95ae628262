mod tests_errors;
mod tests_fixtures;
#[cfg(feature = "interchange")]
mod tests_interchange;
mod tests_skeleton;
