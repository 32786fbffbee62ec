//! Integration tests for the `icm` engine; see the `tests` directory.
