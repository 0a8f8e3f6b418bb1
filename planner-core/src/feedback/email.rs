use serde::{Deserialize, Serialize};

use super::FeedbackSettings;
use crate::domain::Trip;

/// Feedback request email as shown in the preview and handed to the mailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEmail {
    pub recipient: String,
    pub subject: String,
    /// Body paragraphs, in order
    pub paragraphs: Vec<String>,
}

impl FeedbackEmail {
    pub fn compose(trip: &Trip, recipient: &str, settings: &FeedbackSettings) -> Self {
        let destination = &trip.destination;
        let mut paragraphs = vec![
            "Hello,".to_string(),
            format!(
                "We hope you had an amazing time in {}! As your travel companions at PackUpPal, \
                 we'd love to hear about your experience.",
                destination
            ),
            "Please take a moment to complete our short feedback form. Your insights will help us \
             improve our service and assist other travelers planning their own adventures."
                .to_string(),
        ];
        if settings.include_photo_upload {
            paragraphs.push("You can also upload your favourite photos from the trip.".to_string());
        }
        if settings.include_discount_offer {
            paragraphs.push(
                "As a thank you, you'll receive a discount on your next trip planned with PackUpPal."
                    .to_string(),
            );
        }
        paragraphs.push("Thank you for choosing PackUpPal for your travel planning needs!".to_string());
        paragraphs.push("Safe travels,\nThe PackUpPal Team".to_string());

        Self {
            recipient: recipient.to_string(),
            subject: format!("How was your trip to {}?", destination),
            paragraphs,
        }
    }

    pub fn body(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}
