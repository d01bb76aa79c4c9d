use std::cell::RefCell;
use std::collections::HashMap;

use sumchain_core::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct User {
  name: String,
  email: Option<String>,
}

struct Directory {
  users: HashMap<String, User>,
  sent: RefCell<Vec<String>>,
}

impl Directory {
  fn new() -> Self {
    let mut users = HashMap::new();
    users.insert("joe".to_string(), User { name: "joe".to_string(), email: Some("joe@example.com".to_string()) });
    users.insert("ann".to_string(), User { name: "ann".to_string(), email: None });
    Self { users, sent: RefCell::default() }
  }

  fn find_user(&self, name: &str) -> Outcome<User, String> {
    Outcome::of(self.users.get(name).cloned(), format!("no user named '{}'", name))
  }

  fn send_mail(&self, email: String, body: &str) -> String {
    let message = format!("to {}: {}", email, body);
    self.sent.borrow_mut().push(message.clone());
    message
  }
}

fn user_email(user: User) -> Outcome<String, String> {
  let name = user.name;
  Outcome::of(user.email, format!("user '{}' has no email", name))
}

#[test]
fn pipeline_runs_to_completion() {
  let directory = Directory::new();
  let result = Outcome::<_, String>::Ok("joe") >> (|name: &str| directory.find_user(name)) >> user_email
    & (|email: String| directory.send_mail(email, "welcome"));
  assert_eq!(result, Outcome::Ok("to joe@example.com: welcome".to_string()));
  assert_eq!(directory.sent.borrow().len(), 1);
}

#[test]
fn pipeline_stops_at_first_failure_and_remembers_it() {
  let directory = Directory::new();
  let result = Outcome::<_, String>::Ok("ann") >> (|name: &str| directory.find_user(name)) >> user_email
    & (|email: String| directory.send_mail(email, "welcome"));
  assert_eq!(result, Outcome::Err("user 'ann' has no email".to_string()));
  assert!(directory.sent.borrow().is_empty());

  let result = Outcome::<_, String>::Ok("bob") >> (|name: &str| directory.find_user(name)) >> user_email;
  assert_eq!(result.error(), "no user named 'bob'");
}

#[test]
fn failure_is_only_handled_by_or_else() {
  let logged = RefCell::new(Vec::new());
  let directory = Directory::new();
  let log = |e: String| { logged.borrow_mut().push(e.clone()); format!("logged: {}", e) };

  let ok = directory.find_user("joe") >> user_email | log;
  assert_eq!(ok, Outcome::Ok("joe@example.com".to_string()));
  assert!(logged.borrow().is_empty());

  let recovered = directory.find_user("bob") >> user_email | log;
  assert_eq!(recovered, Outcome::Ok("logged: no user named 'bob'".to_string()));
  assert_eq!(*logged.borrow(), vec!["no user named 'bob'".to_string()]);
}

#[test]
fn optional_and_outcome_bridge() {
  let directory = Directory::new();
  let email = directory.find_user("joe").ok().bind(|user| Optional::of(user.email));
  assert_eq!(email, Optional::Present("joe@example.com".to_string()));

  let missing = Optional::<User>::Empty.ok_or("nobody".to_string()) >> user_email;
  assert_eq!(missing, Outcome::Err("nobody".to_string()));
}

#[test]
fn lifted_functions_compose_over_collections() {
  let lengths: Vec<_> = [Optional::Present("ab"), Optional::Empty, Optional::Present("c")]
    .into_iter()
    .map(lift::<Optional<&str>, _, _>(str::len))
    .collect();
  assert_eq!(lengths, vec![Optional::Present(2), Optional::Empty, Optional::Present(1)]);
  assert_eq!(collect_values(lengths), vec![2, 1]);
}

#[test]
fn recovering_with_value_or() {
  let directory = Directory::new();
  let email = (directory.find_user("ann") >> user_email).value_or_else(|| "fallback@example.com".to_string());
  assert_eq!(email, "fallback@example.com");
}
