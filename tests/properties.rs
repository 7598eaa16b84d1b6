use miniml::{
    ast::{Constant, Expr, ExprLet, LetBinding, ValueName},
    lexer::{KEYWORDS, Lexer, Token, TokenKind},
    parse,
    printer::PrettyPrinter,
};
use proptest::prelude::*;

fn value_name_strategy() -> impl Strategy<Value = ValueName> {
    "[a-z_][a-z0-9_']{0,8}"
        .prop_filter("keywords are not value names", |name| {
            !KEYWORDS.iter().any(|(keyword, _)| name.as_str() == *keyword)
        })
        .prop_map(|name| ValueName {
            token: Token::new(TokenKind::LowercaseIdent, name),
        })
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let constant = prop_oneof![
        Just(TokenKind::False),
        Just(TokenKind::True),
        Just(TokenKind::Unit),
    ]
    .prop_map(|kind| Expr::Constant(Constant { kind }));

    constant.prop_recursive(4, 32, 2, |inner| {
        (any::<bool>(), value_name_strategy(), inner.clone(), inner).prop_map(
            |(rec, name, value, body)| {
                Expr::Let(ExprLet {
                    rec,
                    binding: LetBinding {
                        name,
                        value: Box::new(value),
                    },
                    body: Box::new(body),
                })
            },
        )
    })
}

proptest! {
    #[test]
    fn whitespace_only_input_lexes_to_eof(input in "[ \t\r\n]{0,32}") {
        let mut lexer = Lexer::new(&input);
        prop_assert_eq!(lexer.next_token().unwrap().value.kind, TokenKind::Eof);
        prop_assert_eq!(lexer.next_token().unwrap().value.kind, TokenKind::Eof);
    }

    #[test]
    fn non_keyword_identifiers_lex_to_one_token(input in "[a-z_][a-z0-9_']{0,12}") {
        prop_assume!(!KEYWORDS.iter().any(|(keyword, _)| input == *keyword));

        let mut lexer = Lexer::new(&input);
        let token = lexer.next_token().unwrap().value;
        prop_assert_eq!(token.kind, TokenKind::LowercaseIdent);
        prop_assert_eq!(token.lexeme, input);
        prop_assert_eq!(lexer.next_token().unwrap().value.kind, TokenKind::Eof);
    }

    #[test]
    fn keywords_lex_to_keyword_kinds(index in 0..KEYWORDS.len()) {
        let (keyword, kind) = KEYWORDS[index];
        let mut lexer = Lexer::new(keyword);
        let token = lexer.next_token().unwrap().value;
        prop_assert_eq!(token.kind, kind);
        prop_assert_eq!(token.lexeme, keyword);
    }

    #[test]
    fn pretty_print_round_trips(expr in expr_strategy()) {
        let printed = PrettyPrinter::print(&expr);
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(&reparsed, &expr);
        prop_assert_eq!(PrettyPrinter::print(&reparsed), printed);
    }
}
