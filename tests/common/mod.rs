//! Shared fixture builders for integration tests.
#![allow(dead_code)]

use facetmap::{BusinessRecord, Offering};

pub struct RecordBuilder {
    record: BusinessRecord,
}

impl RecordBuilder {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            record: BusinessRecord {
                id,
                name: name.to_string(),
                slug: name.to_lowercase().replace(' ', "-"),
                ..Default::default()
            },
        }
    }

    pub fn city(mut self, city: &str) -> Self {
        self.record.city = Some(city.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.record.location = Some(location.to_string());
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.record.address = Some(address.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.record.business_description = Some(text.to_string());
        self
    }

    pub fn styles(mut self, styles: &[&str]) -> Self {
        let styles = styles.iter().map(|s| s.to_string()).collect();
        self.record.offering = match self.record.offering {
            Offering::Studio {
                drop_in_price_usd, ..
            } => Offering::Studio {
                styles,
                drop_in_price_usd,
            },
            Offering::Retreat {
                duration_days,
                package_price_usd,
                ..
            } => Offering::Retreat {
                styles,
                duration_days,
                package_price_usd,
            },
        };
        self
    }

    pub fn drop_in_price(mut self, price: f64) -> Self {
        if let Offering::Studio {
            ref mut drop_in_price_usd,
            ..
        } = self.record.offering
        {
            *drop_in_price_usd = Some(price);
        }
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.record.amenities = amenities.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn contact(
        mut self,
        email: Option<&str>,
        phone: Option<&str>,
        whatsapp: Option<&str>,
        website: Option<&str>,
    ) -> Self {
        self.record.email_address = email.map(str::to_string);
        self.record.phone_number = phone.map(str::to_string);
        self.record.whatsapp_number = whatsapp.map(str::to_string);
        self.record.website = website.map(str::to_string);
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.record.rating = rating;
        self
    }

    pub fn beach_proximity(mut self, flag: bool) -> Self {
        self.record.beach_proximity = Some(flag);
        self
    }

    pub fn retreats_flag(mut self, flag: bool) -> Self {
        self.record.retreats = Some(flag);
        self
    }

    pub fn teacher_training_flag(mut self, flag: bool) -> Self {
        self.record.teacher_training = Some(flag);
        self
    }

    pub fn meditation_flag(mut self, flag: bool) -> Self {
        self.record.meditation_offered = Some(flag);
        self
    }

    pub fn sound_healing_flag(mut self, flag: bool) -> Self {
        self.record.sound_healing = Some(flag);
        self
    }

    pub fn build(self) -> BusinessRecord {
        self.record
    }
}

/// A small mixed collection used across the integration tests.
pub fn sample_collection() -> Vec<BusinessRecord> {
    vec![
        RecordBuilder::new(1, "Ubud Jungle Shala")
            .city("Ubud")
            .location("Ubud, Bali")
            .description("bamboo forest shala for all levels, beginner basics welcome")
            .styles(&["Hatha", "Yin"])
            .contact(
                Some("om@jungleshala.example"),
                Some("+62 811 111"),
                None,
                Some("https://jungleshala.example"),
            )
            .amenities(&["Showers", "Yoga Mats"])
            .rating(4.9)
            .build(),
        RecordBuilder::new(2, "Canggu Surf Yoga")
            .city("Canggu")
            .address("Jl. Pantai Batu Bolong, beachfront")
            .description("vinyasa flow steps from the surf")
            .styles(&["Vinyasa", "Power Yoga"])
            .contact(None, Some("+62 822 222"), Some("+62 822 222"), None)
            .drop_in_price(12.0)
            .rating(4.4)
            .build(),
        RecordBuilder::new(3, "Seminyak Luxe Retreat")
            .city("Seminyak")
            .location("Seminyak")
            .description("luxury retreat with teacher training certification")
            .styles(&["Vinyasa", "Yin"])
            .amenities(&["Spa", "Pool", "Restaurant", "Accommodation"])
            .contact(
                Some("stay@luxe.example"),
                Some("+62 833 333"),
                Some("+62 833 333"),
                Some("https://luxe.example"),
            )
            .retreats_flag(true)
            .teacher_training_flag(true)
            .rating(4.8)
            .build(),
        RecordBuilder::new(4, "Sanur Beach Flow")
            .city("Sanur")
            .address("beach walk 7")
            .styles(&["Hatha"])
            .rating(4.1)
            .build(),
        RecordBuilder::new(5, "Hidden Valley Practice")
            .description("quiet volcano valley with rice terrace views")
            .build(),
    ]
}
