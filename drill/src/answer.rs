use std::io;

use crate::console::Console;
use crate::term::Term;

/// Trims the ends and collapses inner runs of whitespace to one space.
pub fn normalize(response: &str) -> String {
    response.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word by word, ignoring case and spacing.
pub fn match_response(target: &str, response: &str) -> bool {
    let mut target = target.split_whitespace();
    let mut response = response.split_whitespace();
    loop {
        match (target.next(), response.next()) {
            (None, None) => return true,
            (Some(expected), Some(given)) if expected.to_lowercase() == given.to_lowercase() => {}
            _ => return false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asked {
    /// Right on the first attempt. Only this earns credit.
    FirstTry,
    /// Right after a miss or after the answer was revealed.
    Eventually,
    EndOfInput,
}

/// Shows `term` until the user types its target.
///
/// A wrong answer asks again without giving anything away. An empty answer reveals the target,
/// and the user then has to type it in before moving on.
pub fn ask<C: Console + ?Sized>(console: &mut C, term: &Term, status: &str) -> io::Result<Asked> {
    let mut first = true;
    loop {
        console.clear()?;
        console.show(status)?;
        if !first {
            console.show("Try again!")?;
        }
        console.show(&term.definition)?;

        let Some(response) = console.read_line()? else {
            return Ok(Asked::EndOfInput);
        };
        let response = normalize(&response);
        if match_response(&term.target, &response) {
            return Ok(if first {
                Asked::FirstTry
            } else {
                Asked::Eventually
            });
        }

        first = false;

        if response.is_empty() {
            console.show(&format!("It is: {}", term.target))?;
            let Some(copied) = console.read_line()? else {
                return Ok(Asked::EndOfInput);
            };
            if match_response(&term.target, &copied) {
                return Ok(Asked::Eventually);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::ScriptedConsole;

    #[test]
    fn test_match_response() {
        assert!(match_response("a", "a"));
        assert!(!match_response("a", "a b"));
        assert!(!match_response("a", "b"));
        assert!(match_response("A", "a"));
        assert!(match_response("a", "A"));
    }

    #[test]
    fn test_match_ignores_spacing() {
        assert!(match_response("dzień dobry", "  Dzień \t DOBRY "));
        assert!(!match_response("dzień dobry", "dzieńdobry"));
        assert!(!match_response("a b", "a"));
        assert!(!match_response("a", ""));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  na   stole \t"), "na stole");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn test_first_try() {
        let mut console = ScriptedConsole::new(["KOT"]);
        let asked = ask(&mut console, &Term::new("kot", "cat"), "status").unwrap();
        assert_eq!(asked, Asked::FirstTry);
        assert_eq!(console.shown, vec!["status", "cat"]);
    }

    #[test]
    fn test_wrong_answer_is_not_revealed() {
        let mut console = ScriptedConsole::new(["pies", "kot"]);
        let asked = ask(&mut console, &Term::new("kot", "cat"), "status").unwrap();
        assert_eq!(asked, Asked::Eventually);
        assert!(console.saw("Try again!"));
        assert!(!console.saw("It is: kot"));
    }

    #[test]
    fn test_empty_answer_reveals_and_requires_copy() {
        let mut console = ScriptedConsole::new(["", "kto", "kot"]);
        let asked = ask(&mut console, &Term::new("kot", "cat"), "status").unwrap();
        assert_eq!(asked, Asked::Eventually);
        assert!(console.saw("It is: kot"));
        // the mistyped copy sends the user back to the prompt
        assert_eq!(console.shown.iter().filter(|l| *l == "cat").count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let mut console = ScriptedConsole::new(["pies"]);
        let asked = ask(&mut console, &Term::new("kot", "cat"), "status").unwrap();
        assert_eq!(asked, Asked::EndOfInput);
    }
}
