/// Conversion between typed aggregate ids and their string form.
///
/// The string form is what travels over the HTTP API and what the frontend
/// keeps in component state.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}
