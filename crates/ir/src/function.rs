// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function classification

use serde::{Deserialize, Serialize};

/// Kind of a SQL function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    /// One value per row, e.g. `CHAR_LENGTH(x)`
    Scalar,
    /// One value per group, e.g. `LISTAGG(x)` or `STDDEV_POP(x)`
    Aggregate,
    /// Evaluated over a window, e.g. `ROW_NUMBER() OVER (...)`
    Window,
}
