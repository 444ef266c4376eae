//! Integration tests for the parameter system
//!
//! These tests verify that parameters built through every scheme behave
//! correctly, including the corrected and rejected inputs.

// Tests for the named constructors and the base constructor
mod parameter_tests;

// Tests for the layering derivations
mod layering_tests;

// Tests for JSON specs, serialization and the parameterization collection
mod serialization_tests;
