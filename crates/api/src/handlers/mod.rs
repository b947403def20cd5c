pub mod faqs;
