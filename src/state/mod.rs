/// State management module
///
/// This module handles all application state, including:
/// - The edit session state machine and exit gating (session.rs)

pub mod session;
