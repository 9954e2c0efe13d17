/// Re-encode command.
pub mod convert;
/// Decode and print command.
pub mod decode;
/// Registered format listing command.
pub mod formats;
/// Bounded value tree printer.
pub mod print;
/// Path query command.
pub mod query;
/// Shared command helpers.
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
