#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;
#[cfg(test)]
mod onboarding_tests;
#[cfg(test)]
mod session_tests;
#[cfg(test)]
mod users_tests;
