//! Integration tests for command matching.

mod common;

use common::{message, text_update};
use dbot_core::{ChatType, Context, Update};
use filters::{command, CommandFilter, Filter};

fn tokens(v: &[&str]) -> Option<Vec<String>> {
    Some(v.iter().map(|s| s.to_string()).collect())
}

/// **Test: command with arguments is parsed into name plus shell-split args.**
#[test]
fn test_parse_command_with_arguments() {
    let f = CommandFilter::new(["start"], ["/"], false);
    let msg = message(Some(r#"/start ref "two words""#), ChatType::Private);
    assert_eq!(
        f.parse(&Context::new(), &msg),
        tokens(&["start", "ref", "two words"])
    );
}

/// **Test: case-insensitive by default, exact when case_sensitive is set.**
#[test]
fn test_case_sensitivity() {
    let ctx = Context::new();
    assert!(command(["Start"], ["/"], false).check(&ctx, &text_update("/START")));
    assert!(!command(["Start"], ["/"], true).check(&ctx, &text_update("/start")));
    assert!(command(["Start"], ["/"], true).check(&ctx, &text_update("/Start")));
}

/// **Test: the command must be a whole word; `/startx` does not match `start`.**
#[test]
fn test_command_word_boundary() {
    let ctx = Context::new();
    let f = command(["start"], ["/"], false);
    assert!(f.check(&ctx, &text_update("/start")));
    assert!(f.check(&ctx, &text_update("/start\nnext line")));
    assert!(!f.check(&ctx, &text_update("/startx")));
    assert!(!f.check(&ctx, &text_update("start")));
}

/// **Test: `@botname` suffix is accepted only for this bot's username.**
#[test]
fn test_bot_mention() {
    let ctx = Context::new().with_bot_username("shop_bot");
    let f = command(["buy"], ["/"], false);
    assert!(f.check(&ctx, &text_update("/buy@shop_bot 3")));
    assert!(f.check(&ctx, &text_update("/buy@Shop_Bot")));
    assert!(!f.check(&ctx, &text_update("/buy@other_bot")));
}

/// **Test: several prefixes, and the empty prefix for bare-word commands.**
#[test]
fn test_prefixes() {
    let ctx = Context::new();
    let f = command(["help"], ["/", "!"], false);
    assert!(f.check(&ctx, &text_update("!help")));
    assert!(f.check(&ctx, &text_update("/help")));
    assert!(!f.check(&ctx, &text_update(".help")));

    let bare = command(["menu"], Vec::<String>::new(), false);
    assert!(bare.check(&ctx, &text_update("menu")));
}

/// **Test: captions are matched too; non-message updates never match.**
#[test]
fn test_caption_and_non_message() {
    let ctx = Context::new();
    let mut msg = message(None, ChatType::Private);
    msg.caption = Some("/upload now".to_string());
    let f = command(["upload"], ["/"], false);
    assert!(f.check(&ctx, &Update::Message(msg)));
    assert!(!f.check(&ctx, &common::callback_update(Some("/upload"))));
}
