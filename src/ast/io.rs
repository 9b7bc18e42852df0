#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    pub var_name: String,
}

impl ReadStmt {
    pub fn new(var_name: String) -> Self {
        Self { var_name }
    }
}

/// `write a, b, c;` keeps only `a`; the rest are parsed and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub var_name: String,
}

impl WriteStmt {
    pub fn new(var_name: String) -> Self {
        Self { var_name }
    }
}
