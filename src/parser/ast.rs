// AST (Abstract Syntax Tree) definitions for Decaf programs

use std::fmt;

/// Source line of a node, 1-based
pub type Line = usize;

/// Types a Decaf declaration can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecafType {
    Int,
    Bool,
    Void,
}

impl DecafType {
    /// Map a type keyword to its type, if it is one
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "int" => Some(DecafType::Int),
            "bool" => Some(DecafType::Bool),
            "void" => Some(DecafType::Void),
            _ => None,
        }
    }
}

impl fmt::Display for DecafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecafType::Int => write!(f, "int"),
            DecafType::Bool => write!(f, "bool"),
            DecafType::Void => write!(f, "void"),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Neq,
    // Logical
    And,
    Or,
}

impl BinOp {
    /// Binding strength; `Or` binds loosest at 1, `Mul`/`Div`/`Mod` tightest at 6.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Or => 1,
            BinOp::And => 2,
            BinOp::Eq | BinOp::Neq => 3,
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => 4,
            BinOp::Add | BinOp::Sub => 5,
            BinOp::Mul | BinOp::Div | BinOp::Mod => 6,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
    Not, // !x
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnOp::Neg => write!(f, "-"),
            UnOp::Not => write!(f, "!"),
        }
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int(i32),
    Bool(bool),
    Str(String),
}

/// Variable or array element reference: `name` or `name[index]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub index: Option<Box<Expr>>,
    pub line: Line,
}

/// Function call, usable both as an expression and as a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncCall {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub line: Line,
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal {
        value: Literal,
        line: Line,
    },
    Location(Location),
    Call(FuncCall),
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
        line: Line,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        line: Line,
    },
}

impl Expr {
    /// Get the source line of this expression
    pub fn line(&self) -> Line {
        match self {
            Expr::Literal { line, .. } => *line,
            Expr::Location(loc) => loc.line,
            Expr::Call(call) => call.line,
            Expr::UnaryOp { line, .. } => *line,
            Expr::BinaryOp { line, .. } => *line,
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Break {
        line: Line,
    },
    Continue {
        line: Line,
    },
    Return {
        value: Option<Expr>,
        line: Line,
    },
    Assignment {
        target: Location,
        value: Expr,
        line: Line,
    },
    If {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
        line: Line,
    },
    While {
        condition: Expr,
        body: Block,
        line: Line,
    },
    Call(FuncCall),
}

impl Statement {
    /// Get the source line of this statement
    pub fn line(&self) -> Line {
        match self {
            Statement::Break { line } => *line,
            Statement::Continue { line } => *line,
            Statement::Return { line, .. } => *line,
            Statement::Assignment { line, .. } => *line,
            Statement::If { line, .. } => *line,
            Statement::While { line, .. } => *line,
            Statement::Call(call) => call.line,
        }
    }
}

/// Braced block; locals and statements keep their own source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub locals: Vec<VarDecl>,
    pub statements: Vec<Statement>,
    pub line: Line,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.locals.is_empty() && self.statements.is_empty()
    }
}

/// Global or local variable declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub name: String,
    pub var_type: DecafType,
    pub is_array: bool,
    pub array_length: usize, // 1 for scalars
    pub line: Line,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub param_type: DecafType,
}

/// Function declaration: `def type name(params) { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    pub return_type: DecafType,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub line: Line,
}

/// A single top-level declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Var(VarDecl),
    Func(FuncDecl),
}

impl Declaration {
    pub fn line(&self) -> Line {
        match self {
            Declaration::Var(decl) => decl.line,
            Declaration::Func(decl) => decl.line,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub globals: Vec<VarDecl>,
    pub functions: Vec<FuncDecl>,
    pub line: Line,
}

impl Program {
    pub fn new() -> Self {
        Program {
            globals: Vec::new(),
            functions: Vec::new(),
            line: 1,
        }
    }

    /// Route a declaration into the globals or functions list
    pub fn push(&mut self, decl: Declaration) {
        match decl {
            Declaration::Var(var) => self.globals.push(var),
            Declaration::Func(func) => self.functions.push(func),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty() && self.functions.is_empty()
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
