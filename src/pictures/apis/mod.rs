pub mod seedream;
