use std::io::{BufWriter, Read, Write};

use log::debug;
use serde_json::Deserializer;

use crate::common::{Request, Response};
use crate::dictionary::Dictionary;
use crate::Result;

/// Applies a stream of JSON requests to a single dictionary.
///
/// Each request is answered by one JSON response on its own line. Rejected
/// operations are reported in the response and do not end the session.
pub struct DictSession {
    dictionary: Dictionary,
}

impl DictSession {
    /// Creates a session over the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Reads requests from `reader` until it is exhausted, writing each
    /// response to `writer`.
    ///
    /// Fails on malformed input or I/O errors; requests answered before the
    /// failure have already been applied and flushed.
    pub fn run<R: Read, W: Write>(&mut self, reader: R, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        let requests = Deserializer::from_reader(reader).into_iter::<Request>();

        for request in requests {
            let request = request?;
            debug!("Received request: {:?}", request);

            let response = self.handle(request);
            debug!("Sending response: {:?}", response);

            serde_json::to_writer(&mut writer, &response)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Applies a single request.
    pub fn handle(&mut self, request: Request) -> Response {
        let result = match request {
            Request::Search { word } => self
                .dictionary
                .search(&word)
                .map(|definition| Some(definition.to_owned())),
            Request::Add { word, definition } => {
                self.dictionary.add(word, definition).map(|()| None)
            }
            Request::Update { word, definition } => {
                self.dictionary.update(&word, definition).map(|()| None)
            }
        };

        match result {
            Ok(value) => Response::Ok(value),
            Err(e) => Response::Err(e),
        }
    }

    /// Returns the dictionary as it stands.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Ends the session, handing back the dictionary.
    pub fn into_dictionary(self) -> Dictionary {
        self.dictionary
    }
}
