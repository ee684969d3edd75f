use super::ErrorStr;
use core::error::Error;
use core::fmt;

/// `{}` renders the message alone; `{:#}` appends the location like
/// [`ErrorStr::display_string`].
impl fmt::Display for ErrorStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }
        write!(f, "{} [{}]", self.message, self.location())
    }
}

impl fmt::Debug for ErrorStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorStr")
            .field("message", &self.message)
            .field("location", &self.location())
            .field("cause", &self.cause)
            .finish()
    }
}

impl Error for ErrorStr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
