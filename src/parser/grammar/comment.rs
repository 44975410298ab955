//! Comment parsers

use crate::ast::statement::Comment;

use crate::parser::combinators::{BoxedParser, choice, satisfy, skip_space, string};
use crate::parser::state::{ParseState, Parser};

/// comment := line_comment | block_comment
pub fn comment() -> BoxedParser<Comment> {
    choice(vec![line_comment(), block_comment()])
}

/// line_comment := "//" [^\n]*
pub fn line_comment() -> BoxedParser<Comment> {
    (string("//") * satisfy(|c| c != '\n') - skip_space()) >> |content| Comment { content }
}

/// block_comment := "/*" block_comment_body
pub fn block_comment() -> BoxedParser<Comment> {
    (string("/*") * block_comment_body() - skip_space()) >> |content| Comment { content }
}

/// block_comment_body := ([^*]* "*")+ "/"
///
/// Returns everything up to, but not including, the first "*/".
fn block_comment_body() -> BoxedParser<String> {
    let text = satisfy(|c| c != '*');
    let star = string("*");
    BoxedParser::new(move |state: &mut ParseState| {
        let mut content = String::new();
        loop {
            content.push_str(&text.parse(state)?);
            star.parse(state)?;
            if state.peek_char() == Some('/') {
                state.consume(1);
                return Ok(content);
            }
            content.push('*');
        }
    })
}
