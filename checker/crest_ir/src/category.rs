//! Syntactic categories and the lexical-name classifier.
//!
//! The lexer identifies tokens by lexical name only; [`classify`] resolves a
//! name into the closed [`Category`] enumeration exactly once per token per
//! parse (the cursor builds a category array parallel to the token slice).
//! Names outside the enumeration map to [`Category::Unknown`] — the
//! classifier is total and never fails.

/// Syntactic category of a token, derived from its lexical name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    // === Literals ===
    Identifier,
    IntLit,
    DecimalInt,
    HexaInt,
    OctalInt,
    LongIntLit,
    FloatLit,
    FixedPointLit,
    CharLit,
    StringLit,
    RawStringLit,
    PpNumber,

    // === Keywords ===
    Asm,
    Auto,
    Bool,
    Break,
    Case,
    Catch,
    Char,
    Class,
    Const,
    ConstCast,
    Constexpr,
    Continue,
    Decltype,
    Default,
    Delete,
    Do,
    Double,
    DynamicCast,
    Else,
    Enum,
    Explicit,
    Export,
    Extern,
    False,
    Float,
    For,
    Friend,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Mutable,
    Namespace,
    New,
    Noexcept,
    Nullptr,
    Operator,
    Private,
    Protected,
    Public,
    Register,
    ReinterpretCast,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    StaticAssert,
    StaticCast,
    Struct,
    Switch,
    Template,
    This,
    ThreadLocal,
    Throw,
    True,
    Try,
    Typedef,
    Typeid,
    Typename,
    Union,
    Unsigned,
    Using,
    Virtual,
    Void,
    Volatile,
    WcharT,
    While,

    // === Punctuators and operators ===
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Colon,
    ColonColon,
    Comma,
    Dot,
    DotStar,
    Arrow,
    ArrowStar,
    Ellipsis,
    Question,
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    PlusAssign,
    PlusPlus,
    Minus,
    MinusAssign,
    MinusMinus,
    Star,
    StarAssign,
    Divide,
    DivideAssign,
    Percent,
    PercentAssign,
    And,
    AndAnd,
    AndAssign,
    Or,
    OrOr,
    OrAssign,
    Xor,
    XorAssign,
    Not,
    Compl,
    ShiftLeft,
    ShiftLeftAssign,
    ShiftRight,
    ShiftRightAssign,
    Pound,
    PoundPound,

    // === Preprocessor directives ===
    PpDefine,
    PpElif,
    PpElse,
    PpEndif,
    PpError,
    PpHHeader,
    PpIf,
    PpIfdef,
    PpIfndef,
    PpInclude,
    PpLine,
    PpPragma,
    PpQHeader,
    PpUndef,
    PpWarning,

    // === Trivia ===
    Space,
    Space2,
    Newline,
    GeneratedNewline,
    CComment,
    CppComment,
    ContLine,

    // === Special ===
    Eof,
    Eoi,
    /// Fallback for lexical names outside this enumeration.
    Unknown,
}

impl Category {
    /// True for `(`, `{` and `[`.
    #[inline]
    pub fn is_opening_bracket(self) -> bool {
        matches!(
            self,
            Category::LeftParen | Category::LeftBrace | Category::LeftBracket
        )
    }

    /// True for `)`, `}` and `]`.
    #[inline]
    pub fn is_closing_bracket(self) -> bool {
        matches!(
            self,
            Category::RightParen | Category::RightBrace | Category::RightBracket
        )
    }

    /// The closing category paired with an opening bracket.
    ///
    /// `Less` is included for the template-argument heuristic used by the
    /// declaration builder; the core walkers never treat `<` as a bracket.
    #[inline]
    pub fn matching_closer(self) -> Option<Category> {
        match self {
            Category::LeftParen => Some(Category::RightParen),
            Category::LeftBrace => Some(Category::RightBrace),
            Category::LeftBracket => Some(Category::RightBracket),
            Category::Less => Some(Category::Greater),
            _ => None,
        }
    }

    /// True for tokens that never start a sub-statement: whitespace,
    /// newlines, comments and line continuations.
    ///
    /// This is the default "valid start of sub-statement" complement used by
    /// the declaration builder when copying filler tokens.
    #[inline]
    pub fn is_filler(self) -> bool {
        matches!(
            self,
            Category::Space
                | Category::Space2
                | Category::Newline
                | Category::GeneratedNewline
                | Category::CComment
                | Category::CppComment
                | Category::ContLine
        )
    }

    /// True for the categories that structurally close the current parsing
    /// level: closing brackets, the bare semicolon and the colon (when the
    /// colon is not claimed by a validated ternary).
    #[inline]
    pub fn terminates_level(self) -> bool {
        self.is_closing_bracket() || matches!(self, Category::Semicolon | Category::Colon)
    }
}

/// Resolve a lexical name into its [`Category`].
///
/// Total: names not covered by the enumeration (vendor extensions, trigraph
/// alternates) yield [`Category::Unknown`].
pub fn classify(name: &str) -> Category {
    match name {
        "identifier" => Category::Identifier,
        "intlit" => Category::IntLit,
        "decimalint" => Category::DecimalInt,
        "hexaint" => Category::HexaInt,
        "octalint" => Category::OctalInt,
        "longintlit" => Category::LongIntLit,
        "floatlit" => Category::FloatLit,
        "fixedpointlit" => Category::FixedPointLit,
        "charlit" => Category::CharLit,
        "stringlit" => Category::StringLit,
        "rawstringlit" => Category::RawStringLit,
        "pp_number" => Category::PpNumber,

        "asm" => Category::Asm,
        "auto" => Category::Auto,
        "bool" => Category::Bool,
        "break" => Category::Break,
        "case" => Category::Case,
        "catch" => Category::Catch,
        "char" => Category::Char,
        "class" => Category::Class,
        "const" => Category::Const,
        "constcast" => Category::ConstCast,
        "constexpr" => Category::Constexpr,
        "continue" => Category::Continue,
        "decltype" => Category::Decltype,
        "default" => Category::Default,
        "delete" => Category::Delete,
        "do" => Category::Do,
        "double" => Category::Double,
        "dynamiccast" => Category::DynamicCast,
        "else" => Category::Else,
        "enum" => Category::Enum,
        "explicit" => Category::Explicit,
        "export" => Category::Export,
        "extern" => Category::Extern,
        "false" => Category::False,
        "float" => Category::Float,
        "for" => Category::For,
        "friend" => Category::Friend,
        "goto" => Category::Goto,
        "if" => Category::If,
        "inline" => Category::Inline,
        "int" => Category::Int,
        "long" => Category::Long,
        "mutable" => Category::Mutable,
        "namespace" => Category::Namespace,
        "new" => Category::New,
        "noexcept" => Category::Noexcept,
        "nullptr" => Category::Nullptr,
        "operator" => Category::Operator,
        "private" => Category::Private,
        "protected" => Category::Protected,
        "public" => Category::Public,
        "register" => Category::Register,
        "reinterpretcast" => Category::ReinterpretCast,
        "return" => Category::Return,
        "short" => Category::Short,
        "signed" => Category::Signed,
        "sizeof" => Category::Sizeof,
        "static" => Category::Static,
        "staticassert" => Category::StaticAssert,
        "staticcast" => Category::StaticCast,
        "struct" => Category::Struct,
        "switch" => Category::Switch,
        "template" => Category::Template,
        "this" => Category::This,
        "threadlocal" => Category::ThreadLocal,
        "throw" => Category::Throw,
        "true" => Category::True,
        "try" => Category::Try,
        "typedef" => Category::Typedef,
        "typeid" => Category::Typeid,
        "typename" => Category::Typename,
        "union" => Category::Union,
        "unsigned" => Category::Unsigned,
        "using" => Category::Using,
        "virtual" => Category::Virtual,
        "void" => Category::Void,
        "volatile" => Category::Volatile,
        "wchart" => Category::WcharT,
        "while" => Category::While,

        "leftparen" => Category::LeftParen,
        "rightparen" => Category::RightParen,
        "leftbrace" => Category::LeftBrace,
        "rightbrace" => Category::RightBrace,
        "leftbracket" => Category::LeftBracket,
        "rightbracket" => Category::RightBracket,
        "semicolon" => Category::Semicolon,
        "colon" => Category::Colon,
        "colon_colon" => Category::ColonColon,
        "comma" => Category::Comma,
        "dot" => Category::Dot,
        "dotstar" => Category::DotStar,
        "arrow" => Category::Arrow,
        "arrowstar" => Category::ArrowStar,
        "ellipsis" => Category::Ellipsis,
        "question_mark" => Category::Question,
        "assign" => Category::Assign,
        "equal" => Category::Equal,
        "notequal" => Category::NotEqual,
        "less" => Category::Less,
        "lessequal" => Category::LessEqual,
        "greater" => Category::Greater,
        "greaterequal" => Category::GreaterEqual,
        "plus" => Category::Plus,
        "plusassign" => Category::PlusAssign,
        "plusplus" => Category::PlusPlus,
        "minus" => Category::Minus,
        "minusassign" => Category::MinusAssign,
        "minusminus" => Category::MinusMinus,
        "star" => Category::Star,
        "starassign" => Category::StarAssign,
        "divide" => Category::Divide,
        "divideassign" => Category::DivideAssign,
        "percent" => Category::Percent,
        "percentassign" => Category::PercentAssign,
        "and" => Category::And,
        "andand" => Category::AndAnd,
        "andassign" => Category::AndAssign,
        "or" => Category::Or,
        "oror" => Category::OrOr,
        "orassign" => Category::OrAssign,
        "xor" => Category::Xor,
        "xorassign" => Category::XorAssign,
        "not" => Category::Not,
        "compl" => Category::Compl,
        "shiftleft" => Category::ShiftLeft,
        "shiftleftassign" => Category::ShiftLeftAssign,
        "shiftright" => Category::ShiftRight,
        "shiftrightassign" => Category::ShiftRightAssign,
        "pound" => Category::Pound,
        "pound_pound" => Category::PoundPound,

        "pp_define" => Category::PpDefine,
        "pp_elif" => Category::PpElif,
        "pp_else" => Category::PpElse,
        "pp_endif" => Category::PpEndif,
        "pp_error" => Category::PpError,
        "pp_hheader" => Category::PpHHeader,
        "pp_if" => Category::PpIf,
        "pp_ifdef" => Category::PpIfdef,
        "pp_ifndef" => Category::PpIfndef,
        "pp_include" => Category::PpInclude,
        "pp_line" => Category::PpLine,
        "pp_pragma" => Category::PpPragma,
        "pp_qheader" => Category::PpQHeader,
        "pp_undef" => Category::PpUndef,
        "pp_warning" => Category::PpWarning,

        "space" => Category::Space,
        "space2" => Category::Space2,
        "newline" => Category::Newline,
        "generatednewline" => Category::GeneratedNewline,
        "ccomment" => Category::CComment,
        "cppcomment" => Category::CppComment,
        "contline" => Category::ContLine,

        "eof" => Category::Eof,
        "eoi" => Category::Eoi,

        _ => Category::Unknown,
    }
}
