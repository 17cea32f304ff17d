use pest::{
    Parser,
    iterators::{Pair, Pairs},
};
use pest_derive::Parser;

use crate::ast::{DeviceCall, Import, Token};

#[derive(Parser)]
#[grammar = "src/dmcss.pest"]
pub struct DmcssParser;

impl DmcssParser {
    /// Parse dmcss source into a list of tokens
    pub fn parse_input<'a>(input: &'a str) -> Result<Vec<Token<'a>>, pest::error::Error<Rule>> {
        let mut pairs: Pairs<'a, Rule> = DmcssParser::parse(Rule::file, input)?;
        let Some(file) = pairs.next() else {
            return Ok(Vec::new());
        };

        Ok(file
            .into_inner()
            .filter_map(Self::parse_token)
            .collect::<Vec<_>>())
    }

    fn parse_token(pair: Pair<'_, Rule>) -> Option<Token<'_>> {
        match pair.as_rule() {
            Rule::device_call => Self::parse_device_call(pair).map(Token::Device),
            Rule::import => Self::parse_import(pair).map(Token::Import),
            Rule::literal => Some(Token::Literal(pair.as_str())),
            _ => None,
        }
    }

    fn parse_device_call(pair: Pair<'_, Rule>) -> Option<DeviceCall<'_>> {
        let lexeme = pair.as_str();
        let mut inner = pair.into_inner();

        let name = inner.next()?.as_str();
        let width = inner.next()?.as_str();
        let height = inner.next()?.as_str();

        Some(DeviceCall {
            lexeme,
            name,
            width,
            height,
        })
    }

    fn parse_import(pair: Pair<'_, Rule>) -> Option<Import<'_>> {
        let lexeme = pair.as_str();
        let path = pair.into_inner().next()?.as_str();

        Some(Import { lexeme, path })
    }
}
