mod button;
mod spinner;

pub(crate) use button::Button;
pub(crate) use spinner::Spinner;
