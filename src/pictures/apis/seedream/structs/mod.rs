pub mod seedream_stream_event;
