//! End-to-end tests for `serialpack_types` live under `tests/`.
