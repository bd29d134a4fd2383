/// Application layer: the manifest loader, the branch resolver and the
/// pipeline connecting them to the output streams.
pub mod use_cases;
