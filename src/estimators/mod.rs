mod empirical_search;
pub use empirical_search::EmpiricalSearch;

mod logistic_fit;
pub use logistic_fit::LogisticFit;
