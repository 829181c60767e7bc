pub mod answer_classifier;

pub use answer_classifier::AnswerClassifier;
