use std::fmt;

/// Binary arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expr {
    Number(i64),
    Var(String),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    fn precedence(&self) -> Option<u8> {
        match self {
            Expr::Binary { op, .. } => Some(op.precedence()),
            _ => None,
        }
    }
}

/// Renders the expression in infix form with a single space around each
/// operator.  Parentheses appear only where re-parsing the output would
/// otherwise regroup operands: a left operand binding looser than its
/// parent, or a right operand binding no tighter (the grammar is
/// left-associative and integer division truncates, so `a - (b - c)` and
/// `a * (b / c)` must keep their parentheses).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Binary { op, lhs, rhs } => {
                fmt_operand(f, lhs, |prec| prec < op.precedence())?;
                write!(f, " {} ", op)?;
                fmt_operand(f, rhs, |prec| prec <= op.precedence())
            }
        }
    }
}

fn fmt_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Expr,
    needs_parens: impl Fn(u8) -> bool,
) -> fmt::Result {
    match operand.precedence() {
        Some(prec) if needs_parens(prec) => write!(f, "({})", operand),
        _ => write!(f, "{}", operand),
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Stmt {
    Assign(String, Box<Expr>),
    Print(Box<Expr>),
}
