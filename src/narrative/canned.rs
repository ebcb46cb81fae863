use super::*;

/// Rule-based offline generator. Keeps every generator-dependent flow alive
/// without a text backend: templated strings, neutral numeric scores. The
/// knobs are public so tests can pin a branch (e.g. force a chemistry match).
#[derive(Debug, Clone)]
pub struct CannedNarrator {
    pub chemistry: i32,
    pub relationship_change: i32,
    pub review_count: usize,
}

impl CannedNarrator {
    pub fn new() -> Self {
        Self {
            chemistry: 50,
            relationship_change: 5,
            review_count: 3,
        }
    }
}

impl Default for CannedNarrator {
    fn default() -> Self {
        Self::new()
    }
}

impl NarrativeGenerator for CannedNarrator {
    fn fan_reviews(&mut self, context: &FanReviewContext) -> Result<Vec<String>, NarrativeError> {
        let lines = [
            format!("\"{}\" is exactly what a {} should be.", context.title, context.genre),
            format!("Went in skeptical, came out a fan. {}.", context.outcome),
            format!("Saw \"{}\" twice already.", context.title),
        ];
        Ok(lines.into_iter().take(self.review_count).collect())
    }

    fn proactive_message(
        &mut self,
        context: &ProactiveDmContext,
    ) -> Result<String, NarrativeError> {
        Ok(match context.recent_project.as_deref() {
            Some(title) => format!(
                "Hey {}, heard about \"{}\" wrapping. We should catch up.",
                context.player_name, title
            ),
            None => format!("Hey {}, quiet week out here. How are you holding up?", context.player_name),
        })
    }

    fn dm_reply(&mut self, context: &DmReplyContext) -> Result<String, NarrativeError> {
        Ok(format!(
            "Good hearing from you, {}. Let's talk soon.",
            context.player_name
        ))
    }

    fn dating_profiles(
        &mut self,
        context: &DatingPoolContext,
    ) -> Result<Vec<ProfileSeed>, NarrativeError> {
        let gender = |preferred: &str| match context.preference {
            DatingPreference::Male => "Male".to_string(),
            DatingPreference::Female => "Female".to_string(),
            DatingPreference::Everyone => preferred.to_string(),
        };
        Ok(vec![
            ProfileSeed {
                name: "Rowan Ellis".to_string(),
                age: context.player_age + 2,
                gender: gender("Non-binary"),
                profession: "Architect".to_string(),
                bio: "Designing skylines by day, chasing taco trucks by night.".to_string(),
            },
            ProfileSeed {
                name: "Priya Malhotra".to_string(),
                age: context.player_age + 4,
                gender: gender("Female"),
                profession: "Emergency physician".to_string(),
                bio: "I keep calm under pressure. Your premiere-night nerves don't scare me."
                    .to_string(),
            },
            ProfileSeed {
                name: "Theo Banks".to_string(),
                age: context.player_age.saturating_sub(1).max(18),
                gender: gender("Male"),
                profession: "Session musician".to_string(),
                bio: "Touring less, cooking more. Looking for someone to share leftovers with."
                    .to_string(),
            },
        ])
    }

    fn date_outcome(&mut self, context: &DateContext) -> Result<DateOutcome, NarrativeError> {
        Ok(DateOutcome {
            summary: format!(
                "You and {} talked for hours over dinner.",
                context.profile.name
            ),
            chemistry: self.chemistry,
        })
    }

    fn interaction_scene(
        &mut self,
        context: &SceneContext,
    ) -> Result<InteractionScene, NarrativeError> {
        Ok(InteractionScene {
            scenario: format!(
                "Between takes on \"{}\", {} waves you over to run the next scene.",
                context.title, context.npc_name
            ),
            choices: vec![
                InteractionChoice {
                    text: "Run lines together".to_string(),
                    outcome: ChoiceOutcome {
                        relationship_change: self.relationship_change,
                        log_message: format!(
                            "You ran lines with {} and found a better rhythm.",
                            context.npc_name
                        ),
                        happiness: 2,
                        reputation: 0,
                        performance: 3,
                    },
                },
                InteractionChoice {
                    text: "Beg off and take five".to_string(),
                    outcome: ChoiceOutcome {
                        relationship_change: -self.relationship_change,
                        log_message: format!("You brushed {} off between takes.", context.npc_name),
                        happiness: 1,
                        reputation: -1,
                        performance: 0,
                    },
                },
            ],
        })
    }

    fn partner_talk(
        &mut self,
        context: &PartnerTalkContext,
    ) -> Result<PartnerTalk, NarrativeError> {
        Ok(PartnerTalk {
            scenario: format!(
                "You and {} stayed up late talking about where this is going.",
                context.partner_name
            ),
            relationship_change: self.relationship_change,
        })
    }

    fn feed_post(&mut self, context: &PostContext) -> Result<PostContent, NarrativeError> {
        let subject = context
            .current_project
            .as_deref()
            .or(context.last_project.as_deref())
            .unwrap_or("the grind");
        Ok(PostContent {
            image_description: format!(
                "{} mid-laugh on a sun-washed studio lot.",
                context.player_name
            ),
            caption: format!(
                "Another week of {}. Grateful for all of you. #hollywood #{}",
                subject, context.handle
            ),
        })
    }
}

/// A generator with no backend at all: every call errors, exercising the
/// fallback path at each call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNarrator;

impl NullNarrator {
    fn unavailable<T>(&self) -> Result<T, NarrativeError> {
        Err(NarrativeError::Unavailable(
            "no narrative backend configured".to_string(),
        ))
    }
}

impl NarrativeGenerator for NullNarrator {
    fn fan_reviews(&mut self, _: &FanReviewContext) -> Result<Vec<String>, NarrativeError> {
        self.unavailable()
    }

    fn proactive_message(&mut self, _: &ProactiveDmContext) -> Result<String, NarrativeError> {
        self.unavailable()
    }

    fn dm_reply(&mut self, _: &DmReplyContext) -> Result<String, NarrativeError> {
        self.unavailable()
    }

    fn dating_profiles(
        &mut self,
        _: &DatingPoolContext,
    ) -> Result<Vec<ProfileSeed>, NarrativeError> {
        self.unavailable()
    }

    fn date_outcome(&mut self, _: &DateContext) -> Result<DateOutcome, NarrativeError> {
        self.unavailable()
    }

    fn interaction_scene(&mut self, _: &SceneContext) -> Result<InteractionScene, NarrativeError> {
        self.unavailable()
    }

    fn partner_talk(&mut self, _: &PartnerTalkContext) -> Result<PartnerTalk, NarrativeError> {
        self.unavailable()
    }

    fn feed_post(&mut self, _: &PostContext) -> Result<PostContent, NarrativeError> {
        self.unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::career::Genre;

    #[test]
    fn canned_reviews_honor_the_requested_count() {
        let mut narrator = CannedNarrator::new();
        let reviews = narrator
            .fan_reviews(&FanReviewContext {
                title: "Eternal Gambit".to_string(),
                genre: Genre::Drama,
                outcome: "Solid Hit".to_string(),
            })
            .unwrap();
        assert_eq!(reviews.len(), 3);
    }

    #[test]
    fn null_narrator_always_fails() {
        let mut narrator = NullNarrator;
        assert!(narrator
            .dm_reply(&DmReplyContext {
                npc_name: "Alex Ray".to_string(),
                personality: crate::simulation::npcs::Personality::Friendly,
                player_name: "Starry 1".to_string(),
                status: crate::simulation::social::RelationshipStatus::Friend,
                score: 60,
                history: Vec::new(),
            })
            .is_err());
    }
}
