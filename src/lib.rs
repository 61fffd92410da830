//! Workspace-level integration tests for fibonaccier live under `tests/`.
