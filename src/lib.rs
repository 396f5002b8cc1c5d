//! Workspace-level test package. Integration tests live in `tests/`.
