use super::*;

// =============================================================================
// parse_line
// =============================================================================

#[test]
fn parse_line_simple_commands() {
    assert_eq!(parse_line("  "), Ok(ShellCommand::Empty));
    assert_eq!(parse_line("whoami"), Ok(ShellCommand::Whoami));
    assert_eq!(parse_line("help"), Ok(ShellCommand::Help));
    assert_eq!(parse_line("exit"), Ok(ShellCommand::Quit));
    assert_eq!(parse_line("logout"), Ok(ShellCommand::Action(SessionAction::Logout)));
}

#[test]
fn parse_line_login_and_register() {
    assert_eq!(
        parse_line("login a@b.com pw"),
        Ok(ShellCommand::Action(SessionAction::Login { email: "a@b.com".into(), password: "pw".into() }))
    );
    assert_eq!(
        parse_line("register Ada a@b.com pw"),
        Ok(ShellCommand::Action(SessionAction::Register {
            name: "Ada".into(),
            email: "a@b.com".into(),
            password: "pw".into(),
        }))
    );
}

#[test]
fn parse_line_update_password_is_optional() {
    assert_eq!(
        parse_line("update Ada a@b.com"),
        Ok(ShellCommand::Action(SessionAction::UpdateProfile {
            name: "Ada".into(),
            email: "a@b.com".into(),
            password: None,
        }))
    );
    assert!(matches!(
        parse_line("update Ada a@b.com secret"),
        Ok(ShellCommand::Action(SessionAction::UpdateProfile { password: Some(_), .. }))
    ));
}

#[test]
fn parse_line_rejects_wrong_arity_and_unknown() {
    assert!(parse_line("login a@b.com").is_err());
    assert!(parse_line("register Ada").is_err());
    assert!(parse_line("dance").is_err());
}
