mod score_entries_sea;
mod sqlite_file;
