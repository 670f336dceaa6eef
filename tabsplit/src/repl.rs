use std::io::{self, BufRead, Write};

use tabsplit_application::{Action, Session};
use tabsplit_domain::{FriendId, Payer};
use tabsplit_i18n as i18n;
use tabsplit_parser::{Command, FriendRef, ParseError, PayerChoice, parse_command};
use tabsplit_presentation::{format_outcome, format_session_error, render_screen};

const PROMPT: &str = "> ";

enum Step {
    Render,
    Help,
    Quit,
    Dispatch(Action),
    Reject(String),
}

/// Line-oriented front end: reads commands from `input`, renders to `output`.
pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        self.write_screen(session)?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            let step = match parse_command(&line) {
                Ok(command) => plan(session, command),
                Err(ParseError::Empty) => continue,
                Err(err) => Step::Reject(i18n::command_error(err)),
            };

            match step {
                Step::Quit => return Ok(()),
                Step::Render => self.write_screen(session)?,
                Step::Help => writeln!(self.output, "{}", i18n::HELP)?,
                Step::Reject(message) => self.write_alert(&message)?,
                Step::Dispatch(action) => match session.dispatch(action) {
                    Ok(outcome) => {
                        if let Some(message) = format_outcome(session, &outcome) {
                            writeln!(self.output, "{message}")?;
                        }
                        self.write_screen(session)?;
                    }
                    Err(err) => self.write_alert(&format_session_error(&err))?,
                },
            }
        }
    }

    fn write_screen(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_screen(session))
    }

    fn write_alert(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "! {message}")
    }
}

fn plan(session: &Session, command: Command<'_>) -> Step {
    let action = match command {
        Command::List => return Step::Render,
        Command::Help => return Step::Help,
        Command::Quit => return Step::Quit,
        Command::ToggleAddFriend => Action::ToggleAddFriend,
        Command::Name(name) => Action::EditFriendName(name.to_string()),
        Command::Avatar(avatar) => Action::EditFriendAvatar(avatar.to_string()),
        Command::Select(FriendRef::Id(id)) => Action::SelectFriend(FriendId(id)),
        Command::Select(FriendRef::Name(name)) => match session.ledger().find_by_name(name) {
            Some(friend) => Action::SelectFriend(friend.id()),
            None => return Step::Reject(i18n::unknown_friend_name(name)),
        },
        Command::Close => Action::DeselectFriend,
        Command::Bill(amount) => Action::EditBill(amount.to_string()),
        Command::Expense(amount) => Action::EditUserExpense(amount.to_string()),
        Command::Payer(PayerChoice::User) => Action::SetPayer(Payer::User),
        Command::Payer(PayerChoice::Friend) => Action::SetPayer(Payer::Friend),
        Command::Submit => Action::Submit,
    };
    Step::Dispatch(action)
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::Cursor;
    use tabsplit_domain::{Friend, Money};

    use crate::seed;

    #[fixture]
    fn session() -> Session {
        let ledger =
            seed::initial_ledger(true, "https://i.pravatar.cc/48").expect("valid seed");
        Session::new(ledger)
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut output = Vec::new();
        Repl::new(Cursor::new(script.as_bytes()), &mut output)
            .run(session)
            .expect("in-memory io");
        String::from_utf8(output).expect("utf-8 output")
    }

    fn balance_of(session: &Session, name: &str) -> Money {
        session
            .ledger()
            .find_by_name(name)
            .map(Friend::balance)
            .expect("friend present")
    }

    #[rstest]
    fn splits_bill_by_name(mut session: Session) {
        let output = run_script(
            &mut session,
            "select clark\nbill 100\nexpense 40\npayer user\nsubmit\nquit\n",
        );

        assert_eq!(balance_of(&session, "Clark"), Money::from_i64(53));
        assert!(output.contains("Split the bill with Clark"));
        assert!(output.contains("Clark owes you ₹53"));
    }

    #[rstest]
    fn rejected_split_prints_alert(mut session: Session) {
        let output = run_script(
            &mut session,
            "select 933372\nbill 100\nexpense 120\nsubmit\n",
        );

        assert!(output.contains("! Your expense cannot be more than the bill"));
        assert_eq!(balance_of(&session, "Sarah"), Money::from_i64(20));
    }

    #[rstest]
    fn adds_friend_through_form(mut session: Session) {
        let output = run_script(&mut session, "add\nname Dana\nsubmit\n");

        assert!(output.contains("Added Dana"));
        assert_eq!(balance_of(&session, "Dana"), Money::ZERO);
        assert_eq!(session.ledger().len(), 4);
    }

    #[rstest]
    fn empty_add_friend_form_is_rejected(mut session: Session) {
        let output = run_script(&mut session, "add\nsubmit\n");

        assert!(output.contains("! Please fill all the fields"));
        assert_eq!(session.ledger().len(), 3);
    }

    #[rstest]
    #[case::unknown_command("dance\n", "! Could not understand that: unknown command 'dance'")]
    #[case::unknown_friend("select Zoe\n", "! There is no friend named Zoe")]
    #[case::nothing_open("submit\n", "! There is no open form to submit")]
    fn invalid_input_prints_alert(
        mut session: Session,
        #[case] script: &str,
        #[case] expected: &str,
    ) {
        let output = run_script(&mut session, script);
        assert!(output.contains(expected), "output was:\n{output}");
    }

    #[rstest]
    fn quit_stops_reading(mut session: Session) {
        run_script(&mut session, "quit\nadd\n");
        assert!(!session.mode().is_adding_friend());
    }
}
