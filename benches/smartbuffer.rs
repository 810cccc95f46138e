use Workload::*;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use smartbuffer::{SmartBuffer, error::BufferResult};
use std::hint::black_box;

include!("common.rs");

pub struct WriteJob {
    workload: Workload,
    initial_capacity: usize,
}

pub fn write_job(workload: Workload, initial_capacity: usize) -> WriteJob {
    WriteJob {
        workload,
        initial_capacity,
    }
}

fn fill(buffer: &mut SmartBuffer, workload: Workload) {
    let names = workload.names();
    for n in 0..workload.records() {
        match workload {
            Numbers => {
                buffer.write_i8(n as i8);
                buffer.write_i16(n as i16);
                buffer.write_i32(n as i32);
                buffer.write_f32(n as f32);
            }
            Strings => {
                if let Err(error) = buffer.write_string(names[n % names.len()]) {
                    panic!("Failed to encode string: {error}");
                }
            }
            Mixed => {
                let written = buffer
                    .write(&(n as u64))
                    .and_then(|b| b.write(names[n % names.len()]))
                    .and_then(|b| b.write(&(n as f64)));
                if let Err(error) = written {
                    panic!("Failed to encode record: {error}");
                }
            }
        }
    }
}

fn decode_record(buffer: &mut SmartBuffer, workload: Workload) -> BufferResult<()> {
    match workload {
        Numbers => {
            sink(buffer.read_i8()?);
            sink(buffer.read_i16()?);
            sink(buffer.read_i32()?);
            sink(buffer.read_f32()?);
        }
        Strings => sink(buffer.read_string()?),
        Mixed => {
            sink(buffer.read::<u64>()?);
            sink(buffer.read::<String>()?);
            sink(buffer.read::<f64>()?);
        }
    }
    Ok(())
}

fn drain(buffer: &mut SmartBuffer, workload: Workload) -> u64 {
    let mut count = 0;
    for _ in 0..workload.records() {
        if let Err(error) = decode_record(buffer, workload) {
            panic!("Failed to decode record: {error}");
        }
        count += 1;
    }
    count
}

fn sink<T>(val: T) {
    _ = black_box(val);
}

#[library_benchmark]
#[bench::numbers_small(write_job(Numbers, 8))]
#[bench::numbers_default(write_job(Numbers, 256))]
#[bench::strings_small(write_job(Strings, 8))]
#[bench::mixed_small(write_job(Mixed, 8))]
#[bench::mixed_presized(write_job(Mixed, 1024 * 1024))]
fn encode(job: WriteJob) -> usize {
    let mut buffer = SmartBuffer::with_capacity(job.initial_capacity);
    fill(&mut buffer, black_box(job.workload));
    black_box(buffer.size())
}

pub struct ReadJob {
    buffer: SmartBuffer,
    workload: Workload,
}

pub fn encoded(workload: Workload) -> ReadJob {
    let mut buffer = SmartBuffer::with_capacity(256);
    fill(&mut buffer, workload);
    buffer.reset_read();
    ReadJob { buffer, workload }
}

#[library_benchmark]
#[bench::numbers(encoded(Numbers))]
#[bench::strings(encoded(Strings))]
#[bench::mixed(encoded(Mixed))]
fn decode(mut job: ReadJob) -> u64 {
    black_box(drain(black_box(&mut job.buffer), job.workload))
}

library_benchmark_group!(
    name = round_trip;
    compare_by_id = true;
    benchmarks = encode, decode
);
main!(library_benchmark_groups = round_trip);
