mod performer;
mod recording;
