pub mod airline;
pub mod airline_airport;
pub mod airport;
pub mod db;
pub mod errors;

#[cfg(test)]
mod tests;
