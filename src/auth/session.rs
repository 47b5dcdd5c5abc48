/// The session gate. Two states, one transition: a successful sign-in moves
/// Anonymous to Authenticated, and nothing moves it back. There is no
/// logout for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated,
}

impl Session {
    pub fn on_login(&mut self) {
        *self = Session::Authenticated;
    }

    pub fn is_authenticated(self) -> bool {
        self == Session::Authenticated
    }
}
