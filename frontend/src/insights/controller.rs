use crate::error::InsightError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending {
        industry: String,
    },
    Success {
        industry: String,
        text: String,
    },
    Failed {
        industry: Option<String>,
        error: InsightError,
    },
}

/// A request the caller must now issue. `generation` is handed back to
/// [`InsightsController::complete`] once it settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub industry: String,
}

/// Request lifecycle behind the insights form.
///
/// Overlapping submissions are resolved last-submitted-wins: only the
/// completion carrying the newest generation is applied, older ones are
/// dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct InsightsController {
    state: RequestState,
    generation: u64,
    in_flight: Option<u64>,
}

impl Default for InsightsController {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            generation: 0,
            in_flight: None,
        }
    }
}

impl InsightsController {
    /// Validates the raw input. Empty after trimming records the
    /// validation error and returns `None` without touching the loading
    /// state.
    pub fn submit(&mut self, raw_input: &str) -> Option<Ticket> {
        let industry = raw_input.trim();
        if industry.is_empty() {
            self.state = RequestState::Failed {
                industry: None,
                error: InsightError::EmptyIndustry,
            };
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.state = RequestState::Pending {
            industry: industry.to_string(),
        };
        Some(Ticket {
            generation: self.generation,
            industry: industry.to_string(),
        })
    }

    /// Applies a settled request. Returns false when the completion was
    /// stale and ignored.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<String, InsightError>) -> bool {
        if self.in_flight != Some(ticket.generation) {
            log::debug!(
                "Dropping stale insights response (generation {}, latest {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(text) => RequestState::Success {
                industry: ticket.industry,
                text,
            },
            Err(error) => RequestState::Failed {
                industry: Some(ticket.industry),
                error,
            },
        };
        true
    }

    #[cfg(test)]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Spinner shown and button disabled.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Text for the output panel and whether it is an error line.
    pub fn output(&self) -> Option<(String, bool)> {
        match &self.state {
            RequestState::Idle | RequestState::Pending { .. } => None,
            RequestState::Success { text, .. } => Some((text.clone(), false)),
            RequestState::Failed { error, .. } => Some((error.to_string(), true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::api::fetch_insight;
    use crate::insights::api::tests::{well_formed, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    fn run(controller: &mut InsightsController, transport: &MockTransport, input: &str) {
        if let Some(ticket) = controller.submit(input) {
            assert!(controller.is_loading());
            assert_eq!(controller.output(), None);
            let outcome = block_on(fetch_insight(transport, &ticket.industry));
            assert!(controller.complete(ticket, outcome));
        }
    }

    #[test]
    fn whitespace_input_is_rejected_without_request() {
        let transport = MockTransport::replying(Ok(well_formed("unused")));
        let mut controller = InsightsController::default();

        run(&mut controller, &transport, "   ");

        assert_eq!(transport.calls.borrow().len(), 0);
        assert!(!controller.is_loading());
        assert_eq!(
            controller.output(),
            Some((
                "Please enter an industry to generate insights.".to_string(),
                true
            ))
        );
    }

    #[test]
    fn successful_request_renders_text_and_restores_controls() {
        let transport = MockTransport::replying(Ok(well_formed("CNC keeps shelves stocked.")));
        let mut controller = InsightsController::default();

        run(&mut controller, &transport, "  retail ");

        assert_eq!(transport.calls.borrow().len(), 1);
        assert!(transport.calls.borrow()[0]
            .prompt()
            .unwrap()
            .contains("the retail industry"));
        assert!(!controller.is_loading());
        assert_eq!(
            controller.state(),
            &RequestState::Success {
                industry: "retail".to_string(),
                text: "CNC keeps shelves stocked.".to_string(),
            }
        );
        assert_eq!(
            controller.output(),
            Some(("CNC keeps shelves stocked.".to_string(), false))
        );
    }

    #[test]
    fn malformed_response_shows_generic_failure() {
        let transport = MockTransport::replying(Ok(json!({ "usageMetadata": {} })));
        let mut controller = InsightsController::default();

        run(&mut controller, &transport, "retail");

        assert!(!controller.is_loading());
        assert_eq!(
            controller.output(),
            Some((
                "Could not generate insights. Please try again.".to_string(),
                true
            ))
        );
    }

    #[test]
    fn network_error_message_is_shown() {
        let transport =
            MockTransport::replying(Err(InsightError::Request("NetworkError".to_string())));
        let mut controller = InsightsController::default();

        run(&mut controller, &transport, "retail");

        assert!(!controller.is_loading());
        let (text, is_error) = controller.output().unwrap();
        assert!(is_error);
        assert!(text.contains("NetworkError"));
        assert!(matches!(
            controller.state(),
            RequestState::Failed { industry: Some(industry), .. } if industry == "retail"
        ));
    }

    #[test]
    fn latest_submission_wins() {
        let mut controller = InsightsController::default();
        let first = controller.submit("retail").unwrap();
        let second = controller.submit("medical").unwrap();
        assert_eq!(second.generation, first.generation + 1);

        assert!(controller.complete(second, Ok("Medical devices.".to_string())));
        assert!(!controller.complete(first, Ok("Retail.".to_string())));

        assert!(!controller.is_loading());
        assert_eq!(
            controller.output(),
            Some(("Medical devices.".to_string(), false))
        );
    }

    #[test]
    fn stale_completion_keeps_loading() {
        let mut controller = InsightsController::default();
        let first = controller.submit("retail").unwrap();
        let _second = controller.submit("energy").unwrap();

        assert!(!controller.complete(first, Err(InsightError::UnexpectedShape)));
        assert!(controller.is_loading());
        assert_eq!(
            controller.state(),
            &RequestState::Pending {
                industry: "energy".to_string()
            }
        );
    }

    #[test]
    fn empty_submit_while_pending_keeps_spinner() {
        let mut controller = InsightsController::default();
        let ticket = controller.submit("retail").unwrap();
        assert_eq!(controller.submit(""), None);
        assert!(controller.is_loading());

        assert!(controller.complete(ticket, Ok("Done.".to_string())));
        assert!(!controller.is_loading());
    }
}
