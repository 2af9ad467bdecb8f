//! Edge case tests for expc-lex
