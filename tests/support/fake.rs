//! Scripted in-process runner standing in for the `gh` CLI.

use ghsync::core::runner::{CommandOutput, CommandRunner};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub args: Vec<String>,
    pub stdin: Option<Vec<u8>>,
}

impl Call {
    /// `set`, `delete`, `list` or `status`.
    pub fn verb(&self) -> &str {
        self.args.get(1).map(String::as_str).unwrap_or("")
    }

    /// The secret key of a `set`/`delete` call.
    pub fn key(&self) -> &str {
        self.args.get(2).map(String::as_str).unwrap_or("")
    }
}

/// Fake store: answers `auth status`, lists `existing`, and applies
/// `set`/`delete` to it.
#[derive(Debug, Default)]
pub struct FakeGh {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    existing: BTreeSet<String>,
    calls: Vec<Call>,
    logged_out: bool,
    list_fails: bool,
    failing_keys: BTreeSet<String>,
}

impl FakeGh {
    pub fn new<I, S>(existing: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fake = Self::default();
        fake.state.lock().unwrap().existing = existing.into_iter().map(Into::into).collect();
        Arc::new(fake)
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Vec::<String>::new())
    }

    pub fn logged_out(self: &Arc<Self>) -> Arc<Self> {
        self.state.lock().unwrap().logged_out = true;
        self.clone()
    }

    pub fn failing_list(self: &Arc<Self>) -> Arc<Self> {
        self.state.lock().unwrap().list_fails = true;
        self.clone()
    }

    /// Make mutations of `key` fail.
    pub fn failing_key(self: &Arc<Self>, key: &str) -> Arc<Self> {
        self.state.lock().unwrap().failing_keys.insert(key.to_string());
        self.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_to(&self, verb: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.verb() == verb).collect()
    }

    /// Keys of mutating calls, sorted.
    pub fn mutated_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .calls()
            .iter()
            .filter(|c| c.verb() == "set" || c.verb() == "delete")
            .map(|c| c.key().to_string())
            .collect();
        keys.sort();
        keys
    }

    pub fn existing(&self) -> Vec<String> {
        self.state.lock().unwrap().existing.iter().cloned().collect()
    }

    /// Add a name to the store outside of any pass.
    pub fn add_existing(&self, name: &str) {
        self.state.lock().unwrap().existing.insert(name.to_string());
    }
}

impl CommandRunner for FakeGh {
    fn run(
        &self,
        _program: &str,
        args: &[&str],
        stdin: Option<&[u8]>,
    ) -> std::io::Result<CommandOutput> {
        let mut state = self.state.lock().unwrap();
        let call = Call {
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: stdin.map(<[u8]>::to_vec),
        };
        state.calls.push(call.clone());

        let output = match (args.first().copied(), call.verb()) {
            (Some("auth"), _) if state.logged_out => {
                CommandOutput::failed(1, "You are not logged into any GitHub hosts.")
            }
            (Some("auth"), _) => CommandOutput::ok(""),
            (Some("secret"), "list") if state.list_fails => CommandOutput::failed(1, "HTTP 502"),
            (Some("secret"), "list") => {
                let names: Vec<_> = state
                    .existing
                    .iter()
                    .map(|n| serde_json::json!({ "name": n }))
                    .collect();
                CommandOutput::ok(serde_json::to_vec(&names)?)
            }
            (Some("secret"), "set" | "delete") if state.failing_keys.contains(call.key()) => {
                CommandOutput::failed(1, "HTTP 403: Resource not accessible")
            }
            (Some("secret"), "set") => {
                state.existing.insert(call.key().to_string());
                CommandOutput::ok("")
            }
            (Some("secret"), "delete") => {
                let key = call.key().to_string();
                state.existing.remove(&key);
                CommandOutput::ok("")
            }
            _ => CommandOutput::failed(2, "unknown command"),
        };

        Ok(output)
    }
}
