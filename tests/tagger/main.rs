//! Integration tests for Layer 1: the heuristic sentence tagger.

mod rules;
