#[cfg(test)]
mod common;

#[cfg(test)]
mod account_tests;

#[cfg(test)]
mod subscription_tests;

#[cfg(test)]
mod profile_tests;

#[cfg(test)]
mod tile_tests;

#[cfg(test)]
mod admin_tile_tests;
