#[cfg(test)]
pub(crate) mod common;

#[cfg(test)]
mod test_send_out;







#[cfg(test)]
mod test_invariants;
