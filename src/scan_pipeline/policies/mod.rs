mod response_acceptance;

pub use response_acceptance::ResponseAcceptance;
