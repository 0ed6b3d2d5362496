// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod keyword;
mod punctuator;
mod scanner;
mod source_format;
mod token;
mod token_kind;

pub use self::{
    keyword::Keyword,
    punctuator::Punctuator,
    scanner::{
        scan,
        ScanError,
        ScanErrorKind,
        Scanner,
    },
    source_format::{
        Indicator,
        SourceFormat,
    },
    token::{
        Literal,
        Token,
    },
    token_kind::TokenKind,
};
