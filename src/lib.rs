// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the flag-driven tool.
//
// Module responsibilities:
// - `cli`: Declares the flag surface and resolves flags into one of the
//   three operations (upload, list, delete), rejecting missing-flag
//   combinations before anything else runs.
// - `api`: Encapsulates the IAM server-certificate calls (upload, list,
//   delete) and the local file reading that feeds an upload.
// - `ui`: Renders results as text or JSON and owns the progress spinner
//   shown while a remote call is in flight.
//
// Keeping this separation makes it easier to test flag resolution and
// rendering without touching the network.
pub mod api;
pub mod cli;
pub mod ui;
