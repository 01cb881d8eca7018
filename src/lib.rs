//! Workspace-level golden tests for the bidcalc engine live under `tests/`.
