mod http_file_stager;

pub use http_file_stager::HttpFileStager;
